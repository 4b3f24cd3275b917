use crate::catalog::services::DropdownViewModel;

/// DropdownPresenter port for rendering filter dropdowns
///
/// Called once per dropdown cycle with the recomputed view model. A
/// presenter may call back into the session (for example when rendering a
/// value fires a change event); such nested cycles are discarded.
pub trait DropdownPresenter {
    fn render(&self, model: &DropdownViewModel);
}

impl<T: DropdownPresenter + ?Sized> DropdownPresenter for &T {
    fn render(&self, model: &DropdownViewModel) {
        (**self).render(model);
    }
}
