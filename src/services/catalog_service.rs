//! Búsqueda en el catálogo público
//!
//! Filtros y ordenación sobre los vehículos en venta (disponibles y en
//! consignación), más las facetas para armar los selectores de filtro.

use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

use crate::models::{FuelType, Transmission, Vehicle};
use crate::utils::errors::{invalid_enum_error, AppError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    PriceLow,
    PriceHigh,
    YearNew,
    YearOld,
    MileageLow,
    MileageHigh,
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price-low" => Ok(SortOrder::PriceLow),
            "price-high" => Ok(SortOrder::PriceHigh),
            "year-new" => Ok(SortOrder::YearNew),
            "year-old" => Ok(SortOrder::YearOld),
            "mileage-low" => Ok(SortOrder::MileageLow),
            "mileage-high" => Ok(SortOrder::MileageHigh),
            _ => Err(invalid_enum_error("sort", s)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub fuel: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub sort: Option<SortOrder>,
}

impl CatalogFilter {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            if !vehicle.name.to_lowercase().contains(&term)
                && !vehicle.brand.to_lowercase().contains(&term)
            {
                return false;
            }
        }

        self.brand.as_ref().map_or(true, |b| &vehicle.brand == b)
            && self.category.as_ref().map_or(true, |c| &vehicle.category == c)
            && self.fuel.map_or(true, |f| vehicle.fuel == f)
            && self.transmission.map_or(true, |t| vehicle.transmission == t)
            && self.min_price.map_or(true, |min| vehicle.price >= min)
            && self.max_price.map_or(true, |max| vehicle.price <= max)
            && self.min_year.map_or(true, |min| vehicle.year >= min)
            && self.max_year.map_or(true, |max| vehicle.year <= max)
    }
}

/// Valores distintos presentes en el catálogo, en orden de aparición
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogFacets {
    pub brands: Vec<String>,
    pub categories: Vec<String>,
    pub fuels: Vec<FuelType>,
    pub transmissions: Vec<Transmission>,
}

/// Aplica filtro y orden a los vehículos en venta; los vendidos nunca aparecen
pub fn search(vehicles: &[Vehicle], filter: &CatalogFilter) -> Vec<Vehicle> {
    let mut result: Vec<Vehicle> = vehicles
        .iter()
        .filter(|v| v.is_for_sale() && filter.matches(v))
        .cloned()
        .collect();

    if let Some(order) = filter.sort {
        // sort_by es estable: los empates conservan el orden de inserción
        result.sort_by(|a, b| match order {
            SortOrder::PriceLow => a.price.cmp(&b.price),
            SortOrder::PriceHigh => b.price.cmp(&a.price),
            SortOrder::YearNew => b.year.cmp(&a.year),
            SortOrder::YearOld => a.year.cmp(&b.year),
            SortOrder::MileageLow => a.mileage.cmp(&b.mileage),
            SortOrder::MileageHigh => b.mileage.cmp(&a.mileage),
        });
    }

    log::debug!("🔍 Catálogo: {} resultado(s) para {:?}", result.len(), filter);
    result
}

pub fn facets(vehicles: &[Vehicle]) -> CatalogFacets {
    fn push_unique<T: PartialEq>(values: &mut Vec<T>, value: T) {
        if !values.contains(&value) {
            values.push(value);
        }
    }

    let mut facets = CatalogFacets::default();
    for vehicle in vehicles.iter().filter(|v| v.is_for_sale()) {
        push_unique(&mut facets.brands, vehicle.brand.clone());
        push_unique(&mut facets.categories, vehicle.category.clone());
        push_unique(&mut facets.fuels, vehicle.fuel);
        push_unique(&mut facets.transmissions, vehicle.transmission);
    }
    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::seed::demo_vehicles;
    use crate::models::VehicleStatus;

    fn names(vehicles: &[Vehicle]) -> Vec<&str> {
        vehicles.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything_for_sale_in_order() {
        let vehicles = demo_vehicles();
        let result = search(&vehicles, &CatalogFilter::default());
        assert_eq!(result, vehicles);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_brand() {
        let vehicles = demo_vehicles();
        let filter = CatalogFilter {
            search: Some("tesla".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&search(&vehicles, &filter)), vec!["Tesla Model S"]);

        let filter = CatalogFilter {
            search: Some("AMG".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&search(&vehicles, &filter)), vec!["Mercedes-AMG C43"]);
    }

    #[test]
    fn test_dimension_filters_and_ranges() {
        let vehicles = demo_vehicles();
        let filter = CatalogFilter {
            category: Some("SUV".to_string()),
            max_price: Some(Decimal::from(400_000)),
            ..Default::default()
        };
        assert_eq!(names(&search(&vehicles, &filter)), vec!["Range Rover Evoque"]);

        let filter = CatalogFilter {
            fuel: Some(FuelType::Electric),
            ..Default::default()
        };
        assert_eq!(names(&search(&vehicles, &filter)), vec!["Tesla Model S"]);

        let filter = CatalogFilter {
            min_year: Some(2024),
            max_year: Some(2024),
            ..Default::default()
        };
        assert_eq!(
            names(&search(&vehicles, &filter)),
            vec!["Audi RS6 Avant", "Porsche 911 Turbo S"]
        );
    }

    #[test]
    fn test_sorting() {
        let vehicles = demo_vehicles();
        let by = |sort| {
            let filter = CatalogFilter {
                sort: Some(sort),
                ..Default::default()
            };
            search(&vehicles, &filter)
        };

        let cheapest = by(SortOrder::PriceLow);
        assert_eq!(cheapest.first().unwrap().name, "Range Rover Evoque");
        assert_eq!(by(SortOrder::PriceHigh).first().unwrap().name, "Porsche 911 Turbo S");
        assert_eq!(by(SortOrder::MileageLow).first().unwrap().name, "Porsche 911 Turbo S");
        assert_eq!(by(SortOrder::MileageHigh).first().unwrap().name, "Range Rover Evoque");
        assert_eq!(by(SortOrder::YearOld).first().unwrap().name, "Range Rover Evoque");
        // empate 2024: RS6 antes que el 911 por orden de inserción
        assert_eq!(by(SortOrder::YearNew).first().unwrap().name, "Audi RS6 Avant");
    }

    #[test]
    fn test_sold_vehicles_excluded_from_search_and_facets() {
        let mut vehicles = demo_vehicles();
        vehicles.retain(|v| v.brand == "Tesla");
        vehicles[0].status = VehicleStatus::Sold;

        assert!(search(&vehicles, &CatalogFilter::default()).is_empty());
        assert_eq!(facets(&vehicles), CatalogFacets::default());
    }

    #[test]
    fn test_facets_are_distinct_in_first_seen_order() {
        let facets = facets(&demo_vehicles());
        assert_eq!(
            facets.brands,
            vec!["BMW", "Mercedes", "Audi", "Porsche", "Tesla", "Land Rover"]
        );
        assert_eq!(facets.categories, vec!["SUV", "Sedan", "Wagon", "Esportivo"]);
        assert_eq!(facets.fuels, vec![FuelType::Gasoline, FuelType::Electric]);
        assert_eq!(facets.transmissions, vec![Transmission::Automatic]);
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("price-low".parse::<SortOrder>().unwrap(), SortOrder::PriceLow);
        assert_eq!("Mileage-High".parse::<SortOrder>().unwrap(), SortOrder::MileageHigh);
        assert!("cheapest".parse::<SortOrder>().is_err());
    }
}
