//! Batch generation of stars into a container.

use super::star::Star;
use crate::constants::{CONTAINER_SELECTOR, STAR_COUNT};
use rand::Rng;

/// Anything that can take ownership of freshly generated stars.
///
/// The browser implementation appends `div.star` nodes; `Vec<Star>` is the
/// in-memory stand-in.
pub trait StarContainer {
    type Error;

    fn append_star(&mut self, star: &Star) -> Result<(), Self::Error>;
}

impl<C: StarContainer + ?Sized> StarContainer for &mut C {
    type Error = C::Error;

    fn append_star(&mut self, star: &Star) -> Result<(), Self::Error> {
        (**self).append_star(star)
    }
}

impl StarContainer for Vec<Star> {
    type Error = std::convert::Infallible;

    fn append_star(&mut self, star: &Star) -> Result<(), Self::Error> {
        self.push(*star);
        Ok(())
    }
}

/// How many stars to generate and where they go.
#[derive(Clone, Debug)]
pub struct FieldParams {
    /// Stars appended per call.
    pub count: usize,
    /// CSS selector of the container element.
    pub selector: &'static str,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            selector: CONTAINER_SELECTOR,
        }
    }
}

/// Append `count` random stars to `container`, in generation order.
///
/// Returns the number appended. Stops at the first container error; stars
/// appended before it stay in place. Calling twice appends twice.
pub fn populate<C, R>(container: &mut C, rng: &mut R, count: usize) -> Result<usize, C::Error>
where
    C: StarContainer + ?Sized,
    R: Rng + ?Sized,
{
    for _ in 0..count {
        let star = Star::random(rng);
        container.append_star(&star)?;
    }
    log::debug!("[stars] appended batch of {}", count);
    Ok(count)
}

/// Locate the container for `params.selector`, then fill it.
///
/// The lookup runs before any star is sampled, so a failed lookup leaves
/// both the page and the random source untouched.
pub fn attach_with<C, E, L, R>(locate: L, rng: &mut R, params: &FieldParams) -> Result<usize, E>
where
    C: StarContainer,
    E: From<C::Error>,
    L: FnOnce(&str) -> Result<C, E>,
    R: Rng + ?Sized,
{
    let mut container = locate(params.selector)?;
    let appended = populate(&mut container, rng, params.count)?;
    Ok(appended)
}
