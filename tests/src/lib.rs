//! End-to-end checks of resolve → scan → menu with scripted probers.

#[cfg(test)]
mod scanning;
#[cfg(test)]
mod support;
