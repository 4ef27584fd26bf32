use std::sync::Arc;

use crate::context::Context;
use crate::tools::Tool;

/// A named bundle of related tools.
///
/// `tools` is a factory, not a fixed list: the context decides each tool's
/// prompt, schema and defaults. It must be pure, and the returned methods
/// must be pairwise distinct.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &str;

    fn version(&self) -> &str;

    fn description(&self) -> &str;

    fn tools(&self, context: &Context) -> Vec<Arc<dyn Tool>>;
}
