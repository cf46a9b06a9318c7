pub(crate) use visitor::Visitor;

mod declaration;
mod function;
mod keyframes;
mod slots;
mod value;
mod visitor;
