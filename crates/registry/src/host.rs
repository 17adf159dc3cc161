/// Host-side registration surface.
///
/// `add` hands a freshly created entity to the host for addition to its
/// registry; `request_refresh` asks the host scheduler for an immediate
/// forced state refresh of an existing one. Both are fire-and-forget from
/// this module's point of view.
pub trait EntityHost<E> {
	fn add(&mut self, entity: &E);
	fn request_refresh(&mut self, entity: &E);
}
