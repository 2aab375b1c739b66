#![warn(missing_docs)]
//! Module for additional uom macros that facilitate the creation of single unit values or vecs of them
/// helper macro to create the units
#[macro_export]
macro_rules! uom_unit_creator {
    ($unit:ident, $unit_type:ident, $val1:expr) => {
        $unit_type::new::<$unit>($val1)
    };
    ($unit:ident, $unit_type:ident, $( $x:expr ),*) => {
        {
            use std::vec::Vec;
            let mut temp_vec = Vec::new();
            $(
                temp_vec.push($unit_type::new::<$unit>($x));
            )*
            temp_vec
        }
    };
}

///macro to create a Length in kilometer
#[macro_export]
macro_rules! kilometer {
    ($( $x:expr ),*) =>{
        {
        use uom::si::{f64::Length, length::kilometer};
        $crate::uom_unit_creator![kilometer, Length, $( $x ),*]
        }
    };
}
///macro to create a Length in meter
#[macro_export]
macro_rules! meter {
    ($( $x:expr ),*) =>{
        {
            use uom::si::{f64::Length, length::meter};
            $crate::uom_unit_creator![meter, Length, $( $x ),*]
        }
    };
}
///macro to create a Length in centimeter
#[macro_export]
macro_rules! centimeter {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::centimeter};
        $crate::uom_unit_creator![centimeter, Length, $( $x ),*]
    }};
}
///macro to create a Power in kilowatt
#[macro_export]
macro_rules! kilowatt {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Power, power::kilowatt};
        $crate::uom_unit_creator![kilowatt, Power, $( $x ),*]
    }};
}
///macro to create a Power in watt
#[macro_export]
macro_rules! watt {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Power, power::watt};
        $crate::uom_unit_creator![watt, Power, $( $x ),*]
    }};
}
///macro to create a Power in milliwatt
#[macro_export]
macro_rules! milliwatt {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Power, power::milliwatt};
        $crate::uom_unit_creator![milliwatt, Power, $( $x ),*]
    }};
}
