use crate::commands::helpers::drain_faults;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NewStudent, Student};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, new: NewStudent) -> Result<CmdResult> {
    let student = Student::from_new(new.validated()?);
    store.insert_students(vec![student.clone()]);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added: {} ({}, {})",
        student.nama, student.nomor, student.kelas
    )));
    drain_faults(store, &mut result);
    Ok(result.with_affected_students(vec![student]))
}
