pub(crate) mod barcode;
pub(crate) mod diamond;
pub(crate) mod flame;
pub(crate) mod seal;
pub(crate) mod star;
