/*!
# Graph Algorithms

This module provides the **analytic algorithms** of this crate. All of them are implemented as
extension traits with blanket implementations over the operations in [`crate::ops`] and are
re-exported at the top level of this module, so you can simply do:
```rust
use netsci::algo::*;
```
and gain access to traversal, connectivity, distances, degree/clustering metrics, community
detection and subgraph extraction.
*/

mod community;
mod connectivity;
mod distance;
mod metrics;
mod subgraph;
mod traversal;

use fxhash::{FxHashMap, FxHashSet};

use crate::{error::*, prelude::*, utils::*};

pub use community::*;
pub use connectivity::*;
pub use distance::*;
pub use metrics::*;
pub use subgraph::*;
pub use traversal::*;
