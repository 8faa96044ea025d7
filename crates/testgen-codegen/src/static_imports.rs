use testgen_model::JavaFile;

use crate::imports::ImportOrganizer;
use crate::CodeInjector;

pub const MOCKITO: &str = "org.mockito.Mockito";
pub const ASSERTJ_ASSERTIONS: &str = "org.assertj.core.api.Assertions";
pub const ASSERT_THAT: &str = "assertThat";

/// Adds `import static ...Assertions.assertThat;` and `import static ...Mockito.*;`, in that
/// order, unless an equivalent static import is already present.
pub struct StaticImportsInjector<'a> {
    organizer: &'a ImportOrganizer<'a>,
}

impl<'a> StaticImportsInjector<'a> {
    pub fn new(organizer: &'a ImportOrganizer<'a>) -> Self {
        Self { organizer }
    }
}

impl CodeInjector for StaticImportsInjector<'_> {
    fn inject(&self, file: &mut JavaFile) {
        let header = &mut file.header;

        let assert_that = format!("{ASSERTJ_ASSERTIONS}.{ASSERT_THAT}");
        let all_assertions = format!("{ASSERTJ_ASSERTIONS}.*");
        if !header.has_static_import(&assert_that) && !header.has_static_import(&all_assertions) {
            self.organizer
                .add_static_import(header, ASSERTJ_ASSERTIONS, ASSERT_THAT);
        }

        if !header.has_static_import(&format!("{MOCKITO}.*")) {
            self.organizer
                .add_static_import_for_all_methods(header, MOCKITO);
        }
    }
}
