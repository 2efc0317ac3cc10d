#![allow(dead_code)]

use enumcheck_core::{enum_type, EnumDescriptor, EnumType};

enum_type! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum T1 as "Namespace.T1" {
        Alpha,
        Beta,
        Gamma,
    }
}

enum_type! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum T2 as "Namespace.T2" {
        Beta,
        Gamma,
        Delta,
    }
}

enum_type! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PairA as "Namespace.PairA" {
        A,
        B,
    }
}

enum_type! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PairB as "Namespace.PairB" {
        B = 10,
        A = 20,
    }
}

enum_type! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Single as "Namespace.Single" {
        Only = 7,
    }
}

/// An enumeration with no declared values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Empty {}

impl EnumType for Empty {
    const FULL_NAME: &'static str = "Namespace.Empty";
    const MEMBERS: &'static [(&'static str, Self)] = &[];

    fn underlying(self) -> i64 {
        match self {}
    }
}

/// Two names share the `Red` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Red = 1,
    Blue = 2,
}

impl EnumType for Shade {
    const FULL_NAME: &'static str = "Namespace.Shade";
    const MEMBERS: &'static [(&'static str, Self)] = &[
        ("Red", Shade::Red),
        ("Crimson", Shade::Red),
        ("Blue", Shade::Blue),
    ];

    fn underlying(self) -> i64 {
        self as i64
    }
}

/// Build a descriptor whose member values follow declaration order
pub fn descriptor(full_name: &str, names: &[&str]) -> EnumDescriptor {
    names
        .iter()
        .zip(0i64..)
        .fold(EnumDescriptor::new(full_name), |d, (name, value)| {
            d.with_member(*name, value)
        })
}
