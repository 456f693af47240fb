use kdam::{Bar, BarExt, tqdm};
use std::io::{self, Write};
use stex::read::ReadProgress;

/// Byte progress of the input read, drawn on stderr.
pub struct Progress {
    pb: Option<Bar>,
}

impl Progress {
    pub fn new(desc: &str, hidden: bool) -> Self {
        if hidden {
            return Self { pb: None };
        }

        Self {
            pb: Some(tqdm!(
                desc = desc.to_owned(),
                unit = "B".to_owned(),
                unit_scale = true,
                unit_divisor = 1024,
                dynamic_ncols = true
            )),
        }
    }

    pub fn update(&mut self, progress: ReadProgress) {
        let Some(pb) = &mut self.pb else {
            return;
        };

        if let Some(total) = progress.total {
            pb.total = total as usize;
        }

        // a failed redraw only affects the terminal
        let _ = pb.update_to(progress.read as usize);
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        if let Some(pb) = &mut self.pb {
            let _ = pb.refresh();
            let mut handle = io::stderr().lock();
            let _ = writeln!(handle);
            let _ = handle.flush();
        }
    }
}
