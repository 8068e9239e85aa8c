//! Shared, lockable reference to a navigation menu.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::list::NavigationMenu;

/// Shared handle to a [`NavigationMenu`].
///
/// The registry stores menus behind handles, and nodes hold handles to their
/// nested child menus, so one menu can sit beneath any number of parents.
/// Each menu carries its own reader/writer lock. Cloning a handle clones the
/// reference, not the menu; identity is compared with [`MenuHandle::ptr_eq`].
#[derive(Clone)]
pub struct MenuHandle(Arc<RwLock<NavigationMenu>>);

impl MenuHandle {
    /// Wrap a menu in a new handle.
    pub fn new(menu: NavigationMenu) -> Self {
        Self(Arc::new(RwLock::new(menu)))
    }

    /// Lock the menu for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, NavigationMenu> {
        self.0.read()
    }

    /// Lock the menu for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, NavigationMenu> {
        self.0.write()
    }

    /// Whether both handles refer to the same menu.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the wrapped menu, usable without taking the lock.
    pub(crate) fn menu_ptr(&self) -> *const NavigationMenu {
        self.0.data_ptr().cast_const()
    }
}

impl From<NavigationMenu> for MenuHandle {
    fn from(menu: NavigationMenu) -> Self {
        Self::new(menu)
    }
}

impl fmt::Debug for MenuHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // try_read: a handle may be printed while its menu is write-locked.
        match self.0.try_read() {
            Some(menu) => f
                .debug_struct("MenuHandle")
                .field("key", &menu.key())
                .field("nodes", &menu.len())
                .finish(),
            None => f.debug_struct("MenuHandle").finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_identity() {
        let a = MenuHandle::new(NavigationMenu::new("a"));
        let b = a.clone();
        let c = MenuHandle::new(NavigationMenu::new("a"));
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
        assert_eq!(a.menu_ptr(), b.menu_ptr());
    }

    #[test]
    fn writes_are_visible_through_clones() {
        let a = MenuHandle::new(NavigationMenu::new("a"));
        let b = a.clone();
        a.write().set_id("main-nav");
        assert_eq!(b.read().id(), Some("main-nav"));
    }

    #[test]
    fn menu_ptr_matches_guard_address() {
        let a = MenuHandle::new(NavigationMenu::new("a"));
        let guard = a.read();
        assert!(std::ptr::eq(a.menu_ptr(), &*guard));
    }
}
