mod position;
mod record;
mod user_account;
