#[cfg(test)]
mod common;
#[cfg(test)]
mod test_encoding;
