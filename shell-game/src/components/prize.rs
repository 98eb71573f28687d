/// The prize hidden beneath the winning cup.
#[derive(Debug, Clone, Copy)]
pub struct Prize {}
