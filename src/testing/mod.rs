mod fake_package_registry;
mod mock_filesystem;

pub use fake_package_registry::FakePackageRegistry;
pub use mock_filesystem::MockFilesystem;
