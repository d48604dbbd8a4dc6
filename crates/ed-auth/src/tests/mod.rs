mod service_account;
