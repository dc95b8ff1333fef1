pub mod check_worker;
