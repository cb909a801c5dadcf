pub mod accounts;

mod test_accounts;
