pub mod pe10;
pub mod pe12;
pub mod pe15;
pub mod pe2;
pub mod pe21;
pub mod pe3;
pub mod pe5;
pub mod pe7;
