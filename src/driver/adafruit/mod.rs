pub mod adt7410;
