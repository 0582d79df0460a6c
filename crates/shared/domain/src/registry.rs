//! Type-erased storage for feature slice state.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// State of a feature slice, shareable across request handlers.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Upcast used for downcasting back to the concrete slice.
    fn as_any(&self) -> &dyn Any;
}

/// A slice ready to be registered into the API state.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: std::any::type_name::<T>(), state: Box::new(state) }
    }

    /// Borrows the state as `T` if that is what was registered.
    #[must_use]
    pub fn downcast_ref<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }
}
