pub mod impl_rfd;
pub mod interface;
