use crate::constants::{STAR_CLASS, STAR_TAG};
use crate::core::{Star, StarContainer};
use crate::error::StarfieldError;
use web_sys as web;

#[inline]
pub fn window_document() -> Result<web::Document, StarfieldError> {
    web::window()
        .and_then(|w| w.document())
        .ok_or(StarfieldError::NoDocument)
}

/// First element matching `selector`; an invalid selector counts as not found.
pub fn find_container(
    document: &web::Document,
    selector: &str,
) -> Result<web::Element, StarfieldError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| StarfieldError::ContainerNotFound {
            selector: selector.to_string(),
        })
}

/// Page element that receives `div.star` children.
pub struct DomContainer {
    document: web::Document,
    parent: web::Element,
}

impl DomContainer {
    pub fn locate(document: &web::Document, selector: &str) -> Result<Self, StarfieldError> {
        let parent = find_container(document, selector)?;
        Ok(Self {
            document: document.clone(),
            parent,
        })
    }

    fn build_star_element(&self, star: &Star) -> Result<web::Element, StarfieldError> {
        let el = self
            .document
            .create_element(STAR_TAG)
            .map_err(StarfieldError::dom)?;
        el.class_list().add_1(STAR_CLASS).map_err(StarfieldError::dom)?;
        el.set_attribute("style", &star.style_text())
            .map_err(StarfieldError::dom)?;
        Ok(el)
    }
}

impl StarContainer for DomContainer {
    type Error = StarfieldError;

    fn append_star(&mut self, star: &Star) -> Result<(), Self::Error> {
        let el = self.build_star_element(star)?;
        self.parent.append_child(&el).map_err(StarfieldError::dom)?;
        Ok(())
    }
}
