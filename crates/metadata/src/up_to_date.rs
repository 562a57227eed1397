//! The consistency check between embedded metadata and the declaration it was generated from.
use log::*;

use crate::{introspect, introspect_info, RecordDescriptor, Reflect, UpToDateError};

/// Check that `embedded` still describes `T`, including its table.
///
/// Types without a table directive are checked against the table in `embedded`.
pub fn verify<T: Reflect>(embedded: &RecordDescriptor) -> Result<(), UpToDateError> {
    let info = T::type_info();
    let live = match info.directive {
        Some(_) => introspect::<T>(),
        None => introspect_info(&info, embedded.get_schema(), embedded.get_name()),
    }
    .map_err(|source| UpToDateError::Declaration {
        record: embedded.get_record_type().to_string(),
        source,
    })?;

    if !embedded.matches_declaration(&live) {
        debug!("Embedded: {:?}", embedded);
        debug!("Introspected: {:?}", live);
        return Err(UpToDateError::Mismatch {
            record: embedded.get_record_type().to_string(),
        });
    }

    Ok(())
}

/// Like [verify], but panics.
///
/// Generated code calls this once per record type, before the metadata can be used to build any query.  If the two
/// disagree, neither can be trusted, so there is nothing to recover.
pub fn assert_up_to_date<T: Reflect>(embedded: &RecordDescriptor) {
    if let Err(e) = verify::<T>(embedded) {
        let ty = embedded.get_record_type();
        error!("{}", e);
        panic!(
            "reform: {} struct information is not up-to-date.\n\
             Typically this means that the {} type definition was changed, but reform-gen was not run.\n\
             {}",
            ty, ty, e
        );
    }
}
