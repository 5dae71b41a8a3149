/*!
An ordered observer registry with synchronous broadcast.

# Design requirements:
- Handlers are identified by a caller-supplied key, not by comparing the
  callables themselves - two registrations under the same key are duplicates
  no matter which closures sit behind them
- Registration order is broadcast order, and removal must not disturb the
  relative order of the surviving handlers
- A failed operation leaves the registry exactly as it found it
- Broadcast is best effort: one panicking handler must not starve the
  handlers registered after it
- Handlers may register, deregister or notify from inside a broadcast
  without deadlocking; the in-flight pass works on a snapshot and is not
  affected

# Basic usage

```rust
use glissade_observer::ObserverList;
use std::sync::{Arc, Mutex};

let seen = Arc::new(Mutex::new(Vec::new()));
let list = ObserverList::new();
{
    let seen = seen.clone();
    list.register("recorder", move |value: &i32| seen.lock().unwrap().push(*value)).unwrap();
}
list.notify(&42).unwrap();
assert_eq!(*seen.lock().unwrap(), vec![42]);

// A second registration under the same key is rejected
assert!(list.register("recorder", |_: &i32| {}).is_err());
```
*/

mod error;
mod handler;
mod registry;

pub use error::*;
pub use handler::*;
pub use registry::*;
