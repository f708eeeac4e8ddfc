pub(crate) mod collections_i;
pub(crate) mod collections_ii;
pub(crate) mod control_flow;
pub(crate) mod errors_exceptions;
pub(crate) mod file_io_pathlib;
pub(crate) mod functions;
pub(crate) mod intro_setup;
pub(crate) mod modules_packages_env;
pub(crate) mod operators_expressions;
pub(crate) mod strings_text_basics;
pub(crate) mod syntax_essentials;
pub(crate) mod testing_debugging;
pub(crate) mod variables_and_types;
