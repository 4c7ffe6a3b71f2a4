#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

//---------------------------------------------------------------------------------------------------- Public API
#[cfg(feature = "num")]
pub mod num;

#[cfg(feature = "reclaim")]
pub mod reclaim;

//---------------------------------------------------------------------------------------------------- Private Usage

//----------------------------------------------------------------------------------------------------
