/// One-line label used when echoing entities back to the user.
pub trait Displayable {
    fn display_label(&self) -> String;
}
