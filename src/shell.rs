//! Interactive lookup loop: list cities once, then resolve city ids to
//! student listings until the operator enters the sentinel "0".

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::store::Store;
use crate::StoreError;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the prompt loop until "0" or end of input. Validation failures are
/// reported to the operator and never abort the loop; store and I/O
/// failures do.
pub fn run<R: BufRead, W: Write>(
    store: &Store,
    mut input: R,
    mut output: W,
) -> Result<(), ShellError> {
    let cities = store.cities()?;

    writeln!(output, "Pick a city id below to list its students, or 0 to exit:")?;
    for city in &cities {
        writeln!(output, "{}. {}", city.id, city.title)?;
    }

    let mut line = String::new();
    loop {
        write!(output, "\nCity id (0 to exit): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // end of input acts like the sentinel
            break;
        }
        let entry = line.trim();

        if entry == "0" {
            break;
        }

        let city_id: i64 = match entry.parse() {
            Ok(id) => id,
            Err(_) => {
                writeln!(output, "Invalid city id: enter a whole number.")?;
                continue;
            }
        };
        // only ids shown in the listing are accepted
        if !cities.iter().any(|city| city.id == city_id) {
            writeln!(output, "Unknown city id: pick one from the list.")?;
            continue;
        }

        debug!(city_id, "looking up students");
        let students = store.students_by_city(city_id)?;
        if students.is_empty() {
            writeln!(output, "No students in that city.")?;
            continue;
        }

        writeln!(output, "\nStudents in that city:")?;
        for student in &students {
            writeln!(
                output,
                "Name: {}, Surname: {}, Country: {}, City: {}, Area: {}",
                student.first_name, student.last_name, student.country, student.city, student.area
            )?;
        }
    }

    Ok(())
}
