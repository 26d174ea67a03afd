mod local_filesystem;
mod package_registry;

pub use local_filesystem::LocalFilesystem;
pub use package_registry::PackageRegistry;
