use std::io::Write;

use crate::constants::VERSION;
use crate::task::{Priority, Tag};
use crate::Result;

/// Prints the command, priority-code and urgency-color reference
pub fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "taskdue {}", VERSION)?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  add     create a task (priority, date, time, text)")?;
    writeln!(out, "  print   show the task table")?;
    writeln!(out, "  edit    change one field of a task")?;
    writeln!(out, "  delete  remove a task")?;
    writeln!(out, "  help    show this text")?;
    writeln!(out, "  exit    save and quit")?;
    writeln!(out)?;
    writeln!(out, "Priority codes (P column):")?;
    for priority in Priority::ALL {
        writeln!(
            out,
            "  {}  \x1b[48;5;{}m \x1b[0m  {}",
            priority.code(),
            priority.color(),
            priority.label()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Urgency colors (U column):")?;
    for tag in Tag::ALL {
        writeln!(out, "  \x1b[48;5;{}m \x1b[0m  {}", tag.color(), tag.label())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_names_every_command() {
        let mut out = Vec::new();
        print_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        for cmd in crate::constants::ALL_CMDS {
            assert!(text.contains(cmd), "help should mention `{}`", cmd);
        }
    }

    #[test]
    fn test_help_lists_priority_codes_and_labels() {
        let mut out = Vec::new();
        print_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        for priority in Priority::ALL {
            assert!(text.contains(priority.code()));
            assert!(text.contains(priority.label()));
        }
        for tag in Tag::ALL {
            assert!(text.contains(tag.label()));
        }
    }
}
