//! Repository traits for data access
//!
//! These traits define the interface for keyed resource storage without
//! specifying the implementation (in-memory, database, etc.). Every
//! resource type (User, Todo, Category, Event) goes through the same
//! generic contract.

use async_trait::async_trait;

use crate::error::CalendarResult;

/// Capability interface every stored resource type implements.
///
/// The generic repository and service only need identity access, owner
/// access, and a validation hook; everything type-specific hangs off
/// these associated items.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Lowercase singular kind name, used in error messages ("todo")
    const KIND: &'static str;

    /// Collection path segment under `/api` ("todos")
    const COLLECTION: &'static str;

    /// Whether instances carry an owning-user reference. Users themselves
    /// are not ownership-scoped.
    const OWNED: bool = true;

    /// Relation names of type-specific action links ("toggle" for todos)
    const ACTION_RELS: &'static [&'static str] = &[];

    /// The assigned identifier, empty until the repository assigns one
    fn id(&self) -> &str;

    /// Assign the repository-generated identifier
    fn set_id(&mut self, id: String);

    /// The owning user's id, if this resource type is ownership-scoped
    fn owner_id(&self) -> Option<&str>;

    /// Check required fields. Runs before any store mutation.
    fn validate(&self) -> CalendarResult<()>;

    /// Fill documented defaults on the create path (e.g. a todo starts
    /// with `completed = false` and an empty description). No-op by default.
    fn apply_create_defaults(&mut self) {}
}

/// Boxed in-place mutation, used by read-modify-write operations
/// such as the todo toggle.
pub type Mutator<T> = Box<dyn FnOnce(&mut T) + Send>;

/// Boxed predicate for scan-style queries (login-by-email lookup,
/// event date-range filtering).
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send>;

/// Generic concurrent keyed store with repository-assigned identity.
///
/// Implementations must allocate identifiers atomically: two concurrent
/// `create` calls are never assigned the same id. Concurrent writes to
/// the same id race at last-writer-wins.
#[async_trait]
pub trait ResourceRepository<T: Resource>: Send + Sync {
    /// Store a new resource under a freshly allocated id.
    ///
    /// Fails with `IdentitySupplied` if the resource already carries an
    /// id, and with the resource's own validation error if required
    /// fields are absent.
    async fn create(&self, resource: T) -> CalendarResult<T>;

    /// Fetch a resource by id. Fails with `NotFound` if absent.
    async fn get(&self, id: &str) -> CalendarResult<T>;

    /// All resources owned by `owner_id`, in unspecified order.
    async fn list_by_owner(&self, owner_id: &str) -> CalendarResult<Vec<T>>;

    /// Every stored resource, in unspecified order.
    async fn list_all(&self) -> CalendarResult<Vec<T>>;

    /// Resources matching a predicate, in unspecified order.
    async fn filter(&self, predicate: Predicate<T>) -> CalendarResult<Vec<T>>;

    /// Replace the stored value. The path id always wins over any id
    /// embedded in `value`. Fails with `NotFound` if absent.
    async fn update(&self, id: &str, value: T) -> CalendarResult<T>;

    /// Remove a resource. Fails with `NotFound` if absent.
    async fn delete(&self, id: &str) -> CalendarResult<()>;

    /// Read-modify-write under the entry lock, returning the new value.
    /// Fails with `NotFound` if absent.
    async fn modify(&self, id: &str, mutator: Mutator<T>) -> CalendarResult<T>;
}
