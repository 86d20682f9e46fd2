pub mod taxes;
