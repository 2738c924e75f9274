use std::collections::HashMap;

use prefetch_core::models::{ActivityNode, ResourceId};
use prefetch_core::traits::IResourceSelector;

/// In-memory URL registry keyed by activity name.
///
/// Each destination has a default list of resources. A (source, destination)
/// entry, when present, replaces the default for that specific navigation,
/// e.g. when the detail screen needs different data depending on where the
/// user came from.
#[derive(Debug, Clone, Default)]
pub struct UrlCatalog {
    by_destination: HashMap<String, Vec<ResourceId>>,
    by_transition: HashMap<(String, String), Vec<ResourceId>>,
}

impl UrlCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append default resources for `destination`.
    pub fn register<I, R>(&mut self, destination: &str, resources: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ResourceId>,
    {
        self.by_destination
            .entry(destination.to_string())
            .or_default()
            .extend(resources.into_iter().map(Into::into));
        self
    }

    /// Append resources for the specific `source` → `destination` navigation.
    pub fn register_transition<I, R>(
        &mut self,
        source: &str,
        destination: &str,
        resources: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ResourceId>,
    {
        self.by_transition
            .entry((source.to_string(), destination.to_string()))
            .or_default()
            .extend(resources.into_iter().map(Into::into));
        self
    }

    /// Build from a destination → resources map, e.g. a deserialized fixture.
    pub fn from_destinations<R: Into<ResourceId>>(map: HashMap<String, Vec<R>>) -> Self {
        let mut catalog = Self::new();
        for (destination, resources) in map {
            catalog.register(&destination, resources);
        }
        catalog
    }

    pub fn is_empty(&self) -> bool {
        self.by_destination.is_empty() && self.by_transition.is_empty()
    }

    pub fn lookup(&self, source: &str, destination: &str) -> &[ResourceId] {
        self.by_transition
            .get(&(source.to_string(), destination.to_string()))
            .or_else(|| self.by_destination.get(destination))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl IResourceSelector for UrlCatalog {
    fn resources_for(&self, source: &ActivityNode, destination: &ActivityNode) -> Vec<ResourceId> {
        self.lookup(&source.name, &destination.name).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefetch_core::models::ActivityId;

    fn node(id: u64, name: &str) -> ActivityNode {
        ActivityNode::new(ActivityId(id), name)
    }

    #[test]
    fn destination_defaults_apply_from_any_source() {
        let mut catalog = UrlCatalog::new();
        catalog.register("Detail", ["https://api/items/1", "https://api/items/1/img"]);

        let urls = catalog.resources_for(&node(1, "List"), &node(2, "Detail"));
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0].as_str(), "https://api/items/1");
        assert_eq!(catalog.resources_for(&node(3, "Search"), &node(2, "Detail")), urls);
    }

    #[test]
    fn transition_entry_overrides_default() {
        let mut catalog = UrlCatalog::new();
        catalog
            .register("Detail", ["https://api/items/1"])
            .register_transition("Search", "Detail", ["https://api/search/top"]);

        assert_eq!(
            catalog.lookup("Search", "Detail"),
            &[ResourceId::from("https://api/search/top")]
        );
        assert_eq!(
            catalog.lookup("List", "Detail"),
            &[ResourceId::from("https://api/items/1")]
        );
    }

    #[test]
    fn unknown_destination_yields_nothing() {
        let catalog = UrlCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.resources_for(&node(1, "A"), &node(2, "B")).is_empty());
    }

    #[test]
    fn from_destinations_builds_defaults() {
        let mut map = HashMap::new();
        map.insert("Weather".to_string(), vec!["https://weather/today".to_string()]);
        let catalog = UrlCatalog::from_destinations(map);
        assert_eq!(catalog.lookup("Main", "Weather").len(), 1);
    }
}
