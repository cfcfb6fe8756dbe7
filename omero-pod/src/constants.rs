//! Constants for the omero-pod stack.
//!
//! Centralized location for the hardcoded names, images, ports and
//! environment variables the bootstrapper reproduces.

pub mod envs {
    /// Overrides the container runtime binary used for all invocations.
    pub const OMERO_POD_RUNTIME: &str = "OMERO_POD_RUNTIME";
}

pub mod runtime {
    /// Runtime binary searched on PATH when no override is given.
    pub const DEFAULT_BINARY: &str = "podman";
}

/// The canonical development stack literals.
///
/// These must stay in sync with each other: the server's connection
/// variables reference the database container's identity over the
/// pod-local loopback.
pub mod stack {
    /// Pod shared by the database and server containers.
    pub const POD_NAME: &str = "omero";

    /// OMERO server port, published host:container.
    pub const OMERO_PORT: u16 = 4064;

    pub const DB_CONTAINER: &str = "omerodb";
    pub const DB_IMAGE: &str = "postgres:10";
    pub const DB_PASSWORD_ENV: &str = "POSTGRES_PASSWORD";
    pub const DB_PASSWORD: &str = "omero";

    pub const SERVER_CONTAINER: &str = "omeroserver";
    pub const SERVER_IMAGE: &str = "openmicroscopy/omero-server:5.6";
    pub const SERVER_DB_HOST_ENV: &str = "CONFIG_omero_db_host";
    pub const SERVER_DB_HOST: &str = "localhost";
    pub const SERVER_DB_USER_ENV: &str = "CONFIG_omero_db_user";
    pub const SERVER_DB_USER: &str = "postgres";
    pub const SERVER_DB_NAME_ENV: &str = "CONFIG_omero_db_name";
    pub const SERVER_DB_NAME: &str = "postgres";
}
