pub mod purchase_service;
