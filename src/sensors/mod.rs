pub(crate) mod mag;
