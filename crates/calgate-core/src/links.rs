//! Hypermedia link construction
//!
//! Responses carry a HAL-style `_links` object next to the resource
//! payload: a `self` link, an owner-collection link (`user-todos`,
//! `user-categories`, ... or `all-users` for ownerless kinds) and any
//! type-specific action links such as `toggle` on todos.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::repository::Resource;

/// A single named reference to a related operation or resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// Relation-keyed link set, serialized as a `_links` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSet(BTreeMap<String, Link>);

impl LinkSet {
    pub fn insert(&mut self, rel: impl Into<String>, href: impl Into<String>) {
        self.0.insert(rel.into(), Link::new(href));
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.get(rel)
    }

    pub fn contains(&self, rel: &str) -> bool {
        self.0.contains_key(rel)
    }
}

/// A resource payload decorated with its link set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Linked<T> {
    #[serde(flatten)]
    pub resource: T,

    #[serde(rename = "_links")]
    pub links: LinkSet,
}

/// A collection response: decorated items plus a collection self link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedCollection<T> {
    pub items: Vec<Linked<T>>,

    #[serde(rename = "_links")]
    pub links: LinkSet,
}

/// Pure derivation of link sets from a resource's identity and owner.
///
/// Stateless; an optional base prefix (scheme + authority) is prepended
/// to every href so links can be absolute when a service knows its
/// public address.
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every generated href with `base` (e.g. "http://localhost:8083")
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn collection_href<T: Resource>(&self) -> String {
        format!("{}/api/{}", self.base, T::COLLECTION)
    }

    fn item_href<T: Resource>(&self, id: &str) -> String {
        format!("{}/api/{}/{}", self.base, T::COLLECTION, id)
    }

    /// The conventional link set for a single resource.
    ///
    /// An owned resource without an owner reference gets no
    /// owner-collection link; everything else about the set is fixed
    /// by the resource type.
    pub fn resource_links<T: Resource>(&self, resource: &T) -> LinkSet {
        let mut links = LinkSet::default();
        links.insert("self", self.item_href::<T>(resource.id()));

        if T::OWNED {
            if let Some(owner) = resource.owner_id().filter(|o| !o.is_empty()) {
                links.insert(
                    format!("user-{}", T::COLLECTION),
                    format!("{}?userId={}", self.collection_href::<T>(), owner),
                );
            }
        } else {
            links.insert(
                format!("all-{}", T::COLLECTION),
                self.collection_href::<T>(),
            );
        }

        for rel in T::ACTION_RELS {
            links.insert(
                *rel,
                format!("{}/{}", self.item_href::<T>(resource.id()), rel),
            );
        }

        links
    }

    /// Self link for a collection response, scoped to `owner` when given.
    pub fn collection_links<T: Resource>(&self, owner: Option<&str>) -> LinkSet {
        let mut links = LinkSet::default();
        let href = match owner {
            Some(owner) => format!("{}?userId={}", self.collection_href::<T>(), owner),
            None => self.collection_href::<T>(),
        };
        links.insert("self", href);
        links
    }

    /// Decorate a single resource.
    pub fn decorate<T: Resource>(&self, resource: T) -> Linked<T> {
        let links = self.resource_links(&resource);
        Linked { resource, links }
    }

    /// Decorate a collection and attach its self link.
    pub fn decorate_collection<T: Resource>(
        &self,
        items: Vec<T>,
        owner: Option<&str>,
    ) -> LinkedCollection<T> {
        let links = self.collection_links::<T>(owner);
        let items = items.into_iter().map(|item| self.decorate(item)).collect();
        LinkedCollection { items, links }
    }
}
