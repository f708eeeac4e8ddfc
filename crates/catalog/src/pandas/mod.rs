pub(crate) mod intro_setup;
