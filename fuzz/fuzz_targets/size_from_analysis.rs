#![no_main]

use boiler_quote::core::units::{BOILER_SIZE_LADDER_KW, CYLINDER_SIZE_LADDER_L};
use boiler_quote::input::{BoilerType, PropertyAnalysis};
use boiler_quote::{
    assemble_quote, calculate_cylinder_capacity, calculate_optimal_boiler_size,
    determine_optimal_boiler_type, CatalogSnapshot,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|analysis: PropertyAnalysis| {
    let boiler_type = determine_optimal_boiler_type(&analysis);
    let size = calculate_optimal_boiler_size(&analysis);
    let cylinder = calculate_cylinder_capacity(&analysis);

    assert!(BOILER_SIZE_LADDER_KW.contains(&size));
    assert!(CYLINDER_SIZE_LADDER_L.contains(&cylinder));
    assert_eq!(cylinder == 0, boiler_type == BoilerType::Combi);

    let _ = assemble_quote(&analysis, &CatalogSnapshot::default());
});
