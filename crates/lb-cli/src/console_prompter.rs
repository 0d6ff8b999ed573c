use lb_core::{CoreError, Prompter, Result as CoreResult};

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Line-oriented prompter over any reader/writer pair.
///
/// Built with [`ConsolePrompter::stdio`], masked reads switch terminal echo
/// off for the duration of the read.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
    mask_terminal: bool,
}

impl ConsolePrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
            mask_terminal: true,
        }
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    /// Prompter without terminal masking, for piped or in-memory I/O.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            mask_terminal: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn show(&mut self, prompt: &str) -> CoreResult<()> {
        writeln!(self.output, "{prompt}")
            .and_then(|()| self.output.flush())
            .map_err(|e| CoreError::prompt(prompt, e))
    }

    fn read_raw(&mut self, prompt: &str) -> CoreResult<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| CoreError::prompt(prompt, e))?;

        if read == 0 {
            return Err(CoreError::input_closed(prompt));
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> CoreResult<String> {
        self.show(prompt)?;
        self.read_raw(prompt)
    }

    fn read_masked(&mut self, prompt: &str) -> CoreResult<String> {
        self.show(prompt)?;

        let _echo = if self.mask_terminal {
            Some(EchoGuard::disable(&io::stdin()).map_err(|e| CoreError::prompt(prompt, e))?)
        } else {
            None
        };

        self.read_raw(prompt)
    }

    fn notify(&mut self, message: &str) {
        // Console output failures are not actionable here.
        let _ = writeln!(self.output, "{message}");
    }
}

/// Turns terminal echo off until dropped. No-op when stdin is not a terminal.
#[cfg(unix)]
struct EchoGuard {
    original: Option<nix::sys::termios::Termios>,
}

#[cfg(unix)]
impl EchoGuard {
    fn disable(stdin: &Stdin) -> io::Result<Self> {
        use io::IsTerminal;
        use nix::sys::termios::{self, LocalFlags, SetArg};

        if !stdin.is_terminal() {
            return Ok(Self { original: None });
        }

        let original = termios::tcgetattr(stdin)?;
        let mut silent = original.clone();
        silent.local_flags.remove(LocalFlags::ECHO);
        silent.local_flags.insert(LocalFlags::ECHONL);
        termios::tcsetattr(stdin, SetArg::TCSANOW, &silent)?;

        Ok(Self {
            original: Some(original),
        })
    }
}

#[cfg(unix)]
impl Drop for EchoGuard {
    fn drop(&mut self) {
        if let Some(ref original) = self.original {
            let _ = nix::sys::termios::tcsetattr(
                io::stdin(),
                nix::sys::termios::SetArg::TCSANOW,
                original,
            );
        }
    }
}

#[cfg(not(unix))]
struct EchoGuard;

#[cfg(not(unix))]
impl EchoGuard {
    fn disable(_stdin: &Stdin) -> io::Result<Self> {
        Ok(Self)
    }
}
