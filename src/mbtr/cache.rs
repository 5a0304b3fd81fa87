/* ************************************************************************ **
** This file is part of rsp2, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
**                                                                          **
** Be aware that not all of rsp2 is provided under this permissive license, **
** and that the project as a whole is licensed under the GPL 3.0.           **
** ************************************************************************ */

//! Memo table for results of expensive requests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

/// Remembers the output of every distinct request it has seen.
///
/// Values are handed out as `Rc`s, so a cache hit costs a refcount increment rather than a
/// deep copy.  Nothing is ever evicted.
///
/// Interior mutability makes this `!Sync`; an owner that needs sharing across threads must
/// put the whole owner behind a lock.
#[derive(Debug)]
pub(crate) struct RequestCache<K, V> {
    map: RefCell<HashMap<K, Rc<V>>>,
}

impl<K, V> Default for RequestCache<K, V>
where K: Hash + Eq,
{
    fn default() -> Self { RequestCache { map: RefCell::new(HashMap::new()) } }
}

impl<K, V> RequestCache<K, V>
where K: Hash + Eq + Clone + fmt::Debug,
{
    pub(crate) fn get(&self, key: &K) -> Option<Rc<V>>
    { self.map.borrow().get(key).cloned() }

    pub(crate) fn len(&self) -> usize
    { self.map.borrow().len() }

    /// Look up `key`, computing and storing the value on a miss.
    ///
    /// On `Err`, nothing is stored.  `compute` may itself use other caches of the owner, but
    /// must not reenter this one.
    pub(crate) fn get_or_try_insert_with<E>(
        &self,
        key: &K,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<Rc<V>, E> {
        if let Some(value) = self.get(key) {
            trace!("cache hit for {:?}", key);
            return Ok(value);
        }

        // the borrow is not held while computing
        let value = Rc::new(compute()?);
        match self.map.borrow_mut().entry(key.clone()) {
            Entry::Occupied(e) => Ok(e.get().clone()),
            Entry::Vacant(e) => Ok(e.insert(value).clone()),
        }
    }
}
