/// Crate-wide result. Typed errors from each module travel inside and can be recovered with
/// `downcast_ref`.
pub type Result<T = ()> = anyhow::Result<T>;
