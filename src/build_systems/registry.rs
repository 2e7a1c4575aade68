//! Build system catalog
//!
//! An explicitly constructed, immutable catalog of build system descriptors,
//! passed into the scanner and resolver by reference instead of living in a
//! process-wide static. Tests can build pared-down catalogs of their own.

use super::{BuildSystemDescriptor, BuildSystemId};

#[derive(Debug, Clone)]
pub struct Catalog {
    systems: Vec<BuildSystemDescriptor>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    /// Catalog with all nine supported build systems registered.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.register(super::maven::descriptor());
        catalog.register(super::gradle::descriptor());
        catalog.register(super::npm::descriptor());
        catalog.register(super::python::descriptor());
        catalog.register(super::go_mod::descriptor());
        catalog.register(super::dotnet::descriptor());
        catalog.register(super::cargo::descriptor());
        catalog.register(super::composer::descriptor());
        catalog.register(super::ruby::descriptor());
        catalog
    }

    pub fn register(&mut self, descriptor: BuildSystemDescriptor) {
        self.systems.push(descriptor);
    }

    pub fn systems(&self) -> &[BuildSystemDescriptor] {
        &self.systems
    }

    pub fn get(&self, id: BuildSystemId) -> Option<&BuildSystemDescriptor> {
        self.systems.iter().find(|s| s.id == id)
    }

    /// Look up a build system by display name, case-insensitively.
    pub fn by_name(&self, name: &str) -> Option<&BuildSystemDescriptor> {
        self.systems
            .iter()
            .find(|s| s.id.name().eq_ignore_ascii_case(name))
    }

    pub fn is_supported(&self, id: BuildSystemId) -> bool {
        self.get(id).is_some()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_with_defaults() {
        let catalog = Catalog::with_defaults();
        assert_eq!(catalog.systems().len(), 9);
        for id in BuildSystemId::all() {
            assert!(catalog.is_supported(id), "missing {}", id);
        }
    }

    #[test]
    fn test_get_by_name() {
        let catalog = Catalog::with_defaults();
        assert_eq!(catalog.by_name("maven").unwrap().id, BuildSystemId::Maven);
        assert_eq!(catalog.by_name(".net").unwrap().id, BuildSystemId::DotNet);
        assert!(catalog.by_name("bazel").is_none());
    }

    #[test]
    fn test_custom_catalog() {
        let mut catalog = Catalog::new();
        catalog.register(crate::build_systems::maven::descriptor());
        assert!(catalog.is_supported(BuildSystemId::Maven));
        assert!(!catalog.is_supported(BuildSystemId::Npm));
    }
}
