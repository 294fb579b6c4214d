use std::io::{self, stdin, stdout, BufRead, StdinLock, Stdout, Write};

/// Line based questions on a terminal (or any reader/writer pair).
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(stdin().lock(), stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}: ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Asks until `parse` accepts the answer.
    pub fn ask_parsed<T, E: ToString>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> io::Result<T> {
        loop {
            let answer = self.ask(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => writeln!(self.output, "{}", err.to_string())?,
            }
        }
    }
}

pub fn parse_count(s: &str) -> Result<u32, String> {
    match s.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("Expected a positive number of players, got {:?}", s.trim())),
    }
}
