//! Finds the "safe" nodes of a directed graph: the nodes whose strongly
//! connected component has no edge leaving it.
//!
//! All depth-first traversals run on [`recurse_st`], which keeps the
//! "call stack" of a recursive algorithm on the heap. Arbitrarily deep graphs
//! can therefore be processed on small thread stacks.
use std::any::Any;
use std::thread;

pub mod dfs;
pub mod driver;
pub mod error;
pub mod graph;
pub mod io;
pub mod scc;
pub mod tarjan;

pub use dfs::{dfs_forest, ComponentId, DfsForest};
pub use driver::run;
pub use error::{Error, Result};
pub use graph::{reverse, Graph, Node};
pub use scc::{analyze, kosaraju, out_degrees, safe_nodes, Algorithm, Components};
pub use tarjan::tarjan;

/// The outcome of resuming a [`Frame`].
#[derive(Debug, Eq, PartialEq)]
pub enum FrameState<Y, R> {
    /// The frame wants the result of a recursive call on this argument.
    Yielded(Y),
    /// The frame is done.
    Complete(R),
}

/// A suspended activation of a recursive function.
///
/// `resume` is first called with `Return::default()`. Every later call passes
/// the result of the recursive call requested by the preceding
/// [`FrameState::Yielded`].
pub trait Frame<Ctx> {
    type Yield;
    type Return;

    fn resume(
        &mut self,
        ctx: &mut Ctx,
        res: Self::Return,
    ) -> FrameState<Self::Yield, Self::Return>;
}

/// Turns a function producing frames into a recursive function threading a
/// mutable context through all activations, without consuming thread stack.
pub fn recurse_st<Arg, Res, Ctx, F>(f: impl Fn(Arg) -> F) -> impl Fn(Arg, &mut Ctx) -> Res
where
    Res: Default,
    F: Frame<Ctx, Yield = Arg, Return = Res>,
{
    move |arg: Arg, ctx: &mut Ctx| {
        let mut stack = vec![f(arg)];
        let mut res = Res::default();

        while let Some(mut frame) = stack.pop() {
            match frame.resume(ctx, res) {
                FrameState::Yielded(arg) => {
                    stack.push(frame);
                    stack.push(f(arg));
                    res = Res::default();
                }
                FrameState::Complete(res1) => {
                    res = res1;
                }
            }
        }

        res
    }
}

/// Runs `f` on a fresh thread with a stack of `size` bytes.
pub fn with_stack_size<F, R>(size: usize, f: F) -> thread::Result<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let handle = thread::Builder::new()
        .stack_size(size)
        .spawn(f)
        .map_err(|err| Box::new(err) as Box<dyn Any + Send>)?;
    handle.join()
}
