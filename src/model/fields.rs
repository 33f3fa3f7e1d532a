//! Field classification over model descriptors
//!
//! A [`ModelFields`] partitions one model's declared fields into scalar and
//! relation categories, with inclusion/exclusion filtering applied on every
//! read. A single model is classified several ways within one mutation
//! derivation pass, so every operation takes an optional call-time filter
//! that replaces the stored one without mutating it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::descriptor::{FieldDescriptor, ModelDescriptor};

/// Inclusion/exclusion filter over field names.
///
/// `only`, when non-empty, restricts results to the named fields; `exclude`
/// always removes named fields and wins when a name appears in both. Names
/// that do not exist on the model are inert.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilter {
    pub exclude: BTreeSet<String>,
    pub only: BTreeSet<String>,
}

impl FieldFilter {
    /// Filter that keeps everything
    pub fn none() -> Self {
        Self::default()
    }

    /// Filter removing the named fields
    pub fn excluding<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclude: names.into_iter().map(Into::into).collect(),
            only: BTreeSet::new(),
        }
    }

    /// Filter keeping only the named fields
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclude: BTreeSet::new(),
            only: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a field of this name survives the filter
    pub fn keeps(&self, name: &str) -> bool {
        if self.exclude.contains(name) {
            return false;
        }
        self.only.is_empty() || self.only.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.exclude.is_empty() && self.only.is_empty()
    }
}

/// Classifier over one model's declared fields.
///
/// Holds a reference to the descriptor plus a default filter; every operation
/// is a pure read preserving declaration order.
#[derive(Clone, Debug)]
pub struct ModelFields<'a> {
    model: &'a ModelDescriptor,
    filter: FieldFilter,
}

impl<'a> ModelFields<'a> {
    /// Classifier with an empty default filter
    pub fn new(model: &'a ModelDescriptor) -> Self {
        Self::with_filter(model, FieldFilter::none())
    }

    /// Classifier with a stored default filter
    pub fn with_filter(model: &'a ModelDescriptor, filter: FieldFilter) -> Self {
        Self { model, filter }
    }

    pub fn model(&self) -> &'a ModelDescriptor {
        self.model
    }

    pub fn filter(&self) -> &FieldFilter {
        &self.filter
    }

    fn select(
        &self,
        filter: &FieldFilter,
        keep: fn(&FieldDescriptor) -> bool,
    ) -> Vec<(&'a str, &'a FieldDescriptor)> {
        self.model
            .fields()
            .iter()
            .filter(|(name, field)| filter.keeps(name) && keep(field))
            .map(|(name, field)| (name.as_str(), field))
            .collect()
    }

    /// All fields surviving the stored filter
    pub fn all(&self) -> Vec<(&'a str, &'a FieldDescriptor)> {
        self.all_with(&self.filter)
    }

    /// All fields, with `filter` replacing the stored one for this call
    pub fn all_with(&self, filter: &FieldFilter) -> Vec<(&'a str, &'a FieldDescriptor)> {
        self.select(filter, |_| true)
    }

    pub fn all_names(&self) -> Vec<&'a str> {
        self.all().into_iter().map(|(name, _)| name).collect()
    }

    pub fn all_names_with(&self, filter: &FieldFilter) -> Vec<&'a str> {
        self.all_with(filter).into_iter().map(|(name, _)| name).collect()
    }

    /// Relation fields of every kind
    pub fn related(&self) -> Vec<(&'a str, &'a FieldDescriptor)> {
        self.related_with(&self.filter)
    }

    pub fn related_with(&self, filter: &FieldFilter) -> Vec<(&'a str, &'a FieldDescriptor)> {
        self.select(filter, FieldDescriptor::is_related)
    }

    pub fn related_names(&self) -> Vec<&'a str> {
        self.related().into_iter().map(|(name, _)| name).collect()
    }

    pub fn related_names_with(&self, filter: &FieldFilter) -> Vec<&'a str> {
        self.related_with(filter)
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    /// Many-to-many fields only
    pub fn m2m(&self) -> Vec<(&'a str, &'a FieldDescriptor)> {
        self.m2m_with(&self.filter)
    }

    pub fn m2m_with(&self, filter: &FieldFilter) -> Vec<(&'a str, &'a FieldDescriptor)> {
        self.select(filter, FieldDescriptor::is_many_to_many)
    }

    pub fn m2m_names(&self) -> Vec<&'a str> {
        self.m2m().into_iter().map(|(name, _)| name).collect()
    }

    pub fn m2m_names_with(&self, filter: &FieldFilter) -> Vec<&'a str> {
        self.m2m_with(filter)
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    /// Forward references only
    pub fn one2m(&self) -> Vec<(&'a str, &'a FieldDescriptor)> {
        self.one2m_with(&self.filter)
    }

    pub fn one2m_with(&self, filter: &FieldFilter) -> Vec<(&'a str, &'a FieldDescriptor)> {
        self.select(filter, FieldDescriptor::is_forward)
    }

    pub fn one2m_names(&self) -> Vec<&'a str> {
        self.one2m().into_iter().map(|(name, _)| name).collect()
    }

    pub fn one2m_names_with(&self, filter: &FieldFilter) -> Vec<&'a str> {
        self.one2m_with(filter)
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }
}
