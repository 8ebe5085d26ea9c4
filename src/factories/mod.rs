// src/factories/mod.rs

mod capital_factory;
mod field_factory;

pub use capital_factory::CapitalHospitalFactory;
pub use field_factory::FieldHospitalFactory;

use crate::{HospitalFactory, HospitalFamily};

static FIELD: FieldHospitalFactory = FieldHospitalFactory;
static CAPITAL: CapitalHospitalFactory = CapitalHospitalFactory;

/// Returns the factory that builds the given family.
///
/// The family set is closed, so every tag has exactly one factory. Text that
/// names no family is rejected earlier, when it is parsed into a
/// [`HospitalFamily`].
pub fn factory_for(family: HospitalFamily) -> &'static dyn HospitalFactory {
    match family {
        HospitalFamily::Field => &FIELD,
        HospitalFamily::Capital => &CAPITAL,
    }
}
