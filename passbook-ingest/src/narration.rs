//! Continuation lines extend the narration of the transaction above them.

use passbook_core::InterimTransaction;

/// Append `line` to the last transaction's narration. Returns false when there
/// is no transaction yet to append to.
pub fn merge_continuation(records: &mut [InterimTransaction], line: &str) -> bool {
    let Some(last) = records.last_mut() else {
        return false;
    };
    last.narration.push(' ');
    last.narration.push_str(line.trim());
    true
}
