//! Array-backed binary-heap priority queue with fail-fast snapshot iterators.
//!
//! The core is [`Heap`], a max-heap over a growable array with a
//! caller-supplied [`Comparator`], and [`PriorityQueue`], a thin queue
//! adapter over an owned heap whose iterator yields elements in descending
//! priority order rather than storage order.
//!
//! Both structures hand out *snapshot* iterators: the data is copied at
//! iterator creation, and advancing after any structural mutation of the
//! source fails with [`IterationError::ConcurrentModification`] instead of
//! returning stale or reordered data. Everything is single-owner and
//! single-threaded; "concurrent modification" means interleaved use through
//! one thread of control, and the types are deliberately `!Send`/`!Sync`.
//!
//! Around the core live the two pieces the queue was originally built to
//! serve: [`Student`], a waitlist record with range-validated fields, and
//! [`CommandProcessor`], a stack-based undo/redo dispatcher that pairs each
//! queue mutation with a caller-supplied inverse.
//!
//! # Examples
//!
//! ```
//! use std::rc::Rc;
//! use waitlist_queue::{PriorityQueue, Student};
//!
//! let ada = Rc::new(Student::new("Ada", "816000001", "ada@example.edu", 4.0, 120)?);
//! let bob = Rc::new(Student::new("Bob", "816000002", "bob@example.edu", 3.1, 45)?);
//! let eve = Rc::new(Student::new("Eve", "816000003", "eve@example.edu", 3.7, 90)?);
//!
//! let mut waitlist = PriorityQueue::new();
//! waitlist.offer(Rc::clone(&bob));
//! waitlist.offer(Rc::clone(&ada));
//! waitlist.offer(Rc::clone(&eve));
//!
//! // Natural order ranks students by GPA.
//! assert_eq!(waitlist.peek().map(|s| s.name()), Some("Ada"));
//!
//! // Membership and removal match the exact handle, not an equal-valued record.
//! assert!(waitlist.contains(&eve));
//! assert!(waitlist.remove(&eve));
//! assert!(!waitlist.contains(&eve));
//!
//! // Priority-order iteration drains a private copy, highest GPA first.
//! let names: Vec<String> = waitlist
//!     .iter()
//!     .collect::<Result<Vec<_>, _>>()?
//!     .into_iter()
//!     .map(|s| s.name().to_string())
//!     .collect();
//! assert_eq!(names, ["Ada", "Bob"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod command;
pub mod error;
pub mod heap;
pub mod identity;
pub mod queue;
pub mod student;

pub use command::{CommandProcessor, PluggableCommand};
pub use error::IterationError;
pub use heap::{natural_order, Comparator, Heap, Iter};
pub use identity::Identity;
pub use queue::{PriorityIter, PriorityQueue};
pub use student::{Student, StudentError, MAX_GPA, MAX_UNITS};
