pub(crate) mod archive;
pub(crate) mod goal;
pub(crate) mod idea;
pub(crate) mod journal;
pub(crate) mod subtask;
