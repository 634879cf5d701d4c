mod helpers;

mod flows_test;
mod session_test;
