//! Builder: step-by-step construction, optionally driven by a director.

use crate::error::{PatternError, Result};
use crate::output;

// ============================================================================
// Example: Builder Pattern - Director and Parts
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    pub fn list_parts(&self) -> String {
        format!("Product parts: {}", self.parts.join(", "))
    }
}

pub trait Builder {
    fn produce_part_a(&mut self);
    fn produce_part_b(&mut self);
    fn produce_part_c(&mut self);

    /// Hands over the finished product and starts a fresh one.
    fn product(&mut self) -> Product;
}

#[derive(Default)]
pub struct ConcreteBuilder1 {
    product: Product,
}

impl Builder for ConcreteBuilder1 {
    fn produce_part_a(&mut self) {
        self.product.parts.push("PartA1".to_string());
    }

    fn produce_part_b(&mut self) {
        self.product.parts.push("PartB1".to_string());
    }

    fn produce_part_c(&mut self) {
        self.product.parts.push("PartC1".to_string());
    }

    fn product(&mut self) -> Product {
        std::mem::take(&mut self.product)
    }
}

pub struct Director;

impl Director {
    pub fn build_minimal_viable_product(&self, builder: &mut dyn Builder) {
        builder.produce_part_a();
    }

    pub fn build_full_featured_product(&self, builder: &mut dyn Builder) {
        builder.produce_part_a();
        builder.produce_part_b();
        builder.produce_part_c();
    }
}

pub fn concept_example() -> Vec<String> {
    let director = Director;
    let mut builder = ConcreteBuilder1::default();
    let mut lines = Vec::new();

    lines.push("Standard basic product:".to_string());
    director.build_minimal_viable_product(&mut builder);
    lines.push(builder.product().list_parts());

    lines.push("Standard full featured product:".to_string());
    director.build_full_featured_product(&mut builder);
    lines.push(builder.product().list_parts());

    // The builder works without a director too
    lines.push("Custom product:".to_string());
    builder.produce_part_a();
    builder.produce_part_c();
    lines.push(builder.product().list_parts());

    lines
}

// ============================================================================
// Example: Computer Assembly
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Computer {
    parts: Vec<(String, String)>,
}

impl Computer {
    fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.parts.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.parts.push((key.to_string(), value)),
        }
    }

    pub fn part(&self, key: &str) -> Option<&str> {
        self.parts
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn show_parts(&self) -> Vec<String> {
        let mut lines = vec!["Computer Configuration:".to_string()];
        lines.extend(self.parts.iter().map(|(k, v)| format!("{k}: {v}")));
        lines
    }
}

pub trait ComputerBuilder {
    fn set_cpu(&mut self, cpu: &str) -> &mut dyn ComputerBuilder;
    fn set_ram(&mut self, ram: &str) -> &mut dyn ComputerBuilder;
    fn set_storage(&mut self, storage: &str) -> &mut dyn ComputerBuilder;
    fn set_graphics_card(&mut self, gpu: &str) -> &mut dyn ComputerBuilder;
    fn computer(&self) -> Computer;
}

#[derive(Default)]
pub struct GamingComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder for GamingComputerBuilder {
    fn set_cpu(&mut self, cpu: &str) -> &mut dyn ComputerBuilder {
        self.computer.set("CPU", cpu);
        self
    }

    fn set_ram(&mut self, ram: &str) -> &mut dyn ComputerBuilder {
        self.computer.set("RAM", ram);
        self
    }

    fn set_storage(&mut self, storage: &str) -> &mut dyn ComputerBuilder {
        self.computer.set("Storage", storage);
        self
    }

    fn set_graphics_card(&mut self, gpu: &str) -> &mut dyn ComputerBuilder {
        self.computer.set("GraphicsCard", gpu);
        self
    }

    fn computer(&self) -> Computer {
        self.computer.clone()
    }
}

#[derive(Default)]
pub struct OfficeComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder for OfficeComputerBuilder {
    fn set_cpu(&mut self, cpu: &str) -> &mut dyn ComputerBuilder {
        self.computer.set("CPU", cpu);
        self
    }

    fn set_ram(&mut self, ram: &str) -> &mut dyn ComputerBuilder {
        self.computer.set("RAM", ram);
        self
    }

    fn set_storage(&mut self, storage: &str) -> &mut dyn ComputerBuilder {
        self.computer.set("Storage", storage);
        self
    }

    // Office machines never get a discrete card
    fn set_graphics_card(&mut self, _gpu: &str) -> &mut dyn ComputerBuilder {
        self.computer.set("GraphicsCard", "Integrated GPU");
        self
    }

    fn computer(&self) -> Computer {
        self.computer.clone()
    }
}

pub struct ComputerDirector;

impl ComputerDirector {
    pub fn build_gaming_computer(&self, builder: &mut dyn ComputerBuilder) -> Computer {
        builder
            .set_cpu("Intel i9")
            .set_ram("32GB")
            .set_storage("1TB SSD")
            .set_graphics_card("NVIDIA RTX 3090")
            .computer()
    }

    pub fn build_office_computer(&self, builder: &mut dyn ComputerBuilder) -> Computer {
        builder
            .set_cpu("Intel i5")
            .set_ram("16GB")
            .set_storage("500GB SSD")
            .set_graphics_card("Integrated GPU")
            .computer()
    }
}

pub fn computer_example() -> Vec<String> {
    let director = ComputerDirector;
    let mut lines = vec!["Building Gaming Computer:".to_string()];
    lines.extend(
        director
            .build_gaming_computer(&mut GamingComputerBuilder::default())
            .show_parts(),
    );
    lines.push(String::new());
    lines.push("Building Office Computer:".to_string());
    lines.extend(
        director
            .build_office_computer(&mut OfficeComputerBuilder::default())
            .show_parts(),
    );
    lines
}

// ============================================================================
// Example: Meal Plan
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct MealPlan {
    pub main_course: String,
    pub side_dish: String,
    pub dessert: String,
}

impl MealPlan {
    pub fn list_items(&self) -> Vec<String> {
        vec![
            format!("Main Course: {}", self.main_course),
            format!("Side Dish: {}", self.side_dish),
            format!("Dessert: {}", self.dessert),
        ]
    }
}

pub trait MealPlanBuilder {
    fn add_main_course(&mut self) -> &mut dyn MealPlanBuilder;
    fn add_side_dish(&mut self) -> &mut dyn MealPlanBuilder;
    fn add_dessert(&mut self) -> &mut dyn MealPlanBuilder;
    fn meal_plan(&self) -> MealPlan;
}

#[derive(Default)]
pub struct StandardMealPlanBuilder {
    plan: MealPlan,
}

impl MealPlanBuilder for StandardMealPlanBuilder {
    fn add_main_course(&mut self) -> &mut dyn MealPlanBuilder {
        self.plan.main_course = "Steak".to_string();
        self
    }

    fn add_side_dish(&mut self) -> &mut dyn MealPlanBuilder {
        self.plan.side_dish = "French Fries".to_string();
        self
    }

    fn add_dessert(&mut self) -> &mut dyn MealPlanBuilder {
        self.plan.dessert = "Ice Cream".to_string();
        self
    }

    fn meal_plan(&self) -> MealPlan {
        self.plan.clone()
    }
}

#[derive(Default)]
pub struct VegetarianMealPlanBuilder {
    plan: MealPlan,
}

impl MealPlanBuilder for VegetarianMealPlanBuilder {
    fn add_main_course(&mut self) -> &mut dyn MealPlanBuilder {
        self.plan.main_course = "Vegetarian Burger".to_string();
        self
    }

    fn add_side_dish(&mut self) -> &mut dyn MealPlanBuilder {
        self.plan.side_dish = "Salad".to_string();
        self
    }

    fn add_dessert(&mut self) -> &mut dyn MealPlanBuilder {
        self.plan.dessert = "Fruit Salad".to_string();
        self
    }

    fn meal_plan(&self) -> MealPlan {
        self.plan.clone()
    }
}

pub struct MealPlanDirector;

impl MealPlanDirector {
    pub fn build_full_meal(&self, builder: &mut dyn MealPlanBuilder) -> MealPlan {
        builder
            .add_main_course()
            .add_side_dish()
            .add_dessert()
            .meal_plan()
    }
}

pub fn meal_plan_example() -> Vec<String> {
    let director = MealPlanDirector;
    let mut lines = vec!["Standard Meal Plan:".to_string()];
    lines.extend(
        director
            .build_full_meal(&mut StandardMealPlanBuilder::default())
            .list_items(),
    );
    lines.push(String::new());
    lines.push("Vegetarian Meal Plan:".to_string());
    lines.extend(
        director
            .build_full_meal(&mut VegetarianMealPlanBuilder::default())
            .list_items(),
    );
    lines
}

// ============================================================================
// Example: SQL Query Builder (MySQL vs PostgreSQL)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    Select,
    Update,
    Delete,
}

#[derive(Debug, Default)]
struct SqlQuery {
    base: String,
    query_type: Option<QueryType>,
    conditions: Vec<String>,
    limit: Option<String>,
}

impl SqlQuery {
    fn render(&self) -> String {
        let mut sql = self.base.clone();
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
        if let Some(limit) = &self.limit {
            sql.push_str(limit);
        }
        sql.push(';');
        sql
    }
}

pub trait SqlQueryBuilder {
    fn select(&mut self, table: &str, fields: &[&str]) -> &mut dyn SqlQueryBuilder;
    fn where_clause(
        &mut self,
        field: &str,
        value: &str,
        operator: &str,
    ) -> Result<&mut dyn SqlQueryBuilder>;
    fn limit(&mut self, start: u32, offset: u32) -> Result<&mut dyn SqlQueryBuilder>;
    fn sql(&self) -> String;
}

fn start_select(query: &mut SqlQuery, table: &str, fields: &[&str]) {
    *query = SqlQuery {
        base: format!("SELECT {} FROM {}", fields.join(", "), table),
        query_type: Some(QueryType::Select),
        ..SqlQuery::default()
    };
}

fn add_condition(query: &mut SqlQuery, field: &str, value: &str, operator: &str) -> Result<()> {
    match query.query_type {
        Some(QueryType::Select | QueryType::Update | QueryType::Delete) => {
            query
                .conditions
                .push(format!("{field} {operator} '{value}'"));
            Ok(())
        }
        None => Err(PatternError::invalid_query(
            "WHERE can only be added to SELECT, UPDATE OR DELETE",
        )),
    }
}

fn check_limit(query: &SqlQuery) -> Result<()> {
    if query.query_type == Some(QueryType::Select) {
        Ok(())
    } else {
        Err(PatternError::invalid_query("LIMIT can only be added to SELECT"))
    }
}

#[derive(Default)]
pub struct MySqlQueryBuilder {
    query: SqlQuery,
}

impl SqlQueryBuilder for MySqlQueryBuilder {
    fn select(&mut self, table: &str, fields: &[&str]) -> &mut dyn SqlQueryBuilder {
        start_select(&mut self.query, table, fields);
        self
    }

    fn where_clause(
        &mut self,
        field: &str,
        value: &str,
        operator: &str,
    ) -> Result<&mut dyn SqlQueryBuilder> {
        add_condition(&mut self.query, field, value, operator)?;
        Ok(self)
    }

    fn limit(&mut self, start: u32, offset: u32) -> Result<&mut dyn SqlQueryBuilder> {
        check_limit(&self.query)?;
        self.query.limit = Some(format!(" LIMIT {start}, {offset}"));
        Ok(self)
    }

    fn sql(&self) -> String {
        self.query.render()
    }
}

/// Same as MySQL apart from the LIMIT syntax.
#[derive(Default)]
pub struct PostgresQueryBuilder {
    query: SqlQuery,
}

impl SqlQueryBuilder for PostgresQueryBuilder {
    fn select(&mut self, table: &str, fields: &[&str]) -> &mut dyn SqlQueryBuilder {
        start_select(&mut self.query, table, fields);
        self
    }

    fn where_clause(
        &mut self,
        field: &str,
        value: &str,
        operator: &str,
    ) -> Result<&mut dyn SqlQueryBuilder> {
        add_condition(&mut self.query, field, value, operator)?;
        Ok(self)
    }

    fn limit(&mut self, start: u32, offset: u32) -> Result<&mut dyn SqlQueryBuilder> {
        check_limit(&self.query)?;
        self.query.limit = Some(format!(" LIMIT {start} OFFSET {offset}"));
        Ok(self)
    }

    fn sql(&self) -> String {
        self.query.render()
    }
}

pub fn build_user_query(builder: &mut dyn SqlQueryBuilder) -> Result<String> {
    Ok(builder
        .select("users", &["name", "email", "password"])
        .where_clause("age", "18", ">")?
        .where_clause("age", "30", "<")?
        .limit(10, 20)?
        .sql())
}

pub fn sql_query_example() -> Result<Vec<String>> {
    Ok(vec![
        "Testing MySQL query builder:".to_string(),
        build_user_query(&mut MySqlQueryBuilder::default())?,
        String::new(),
        "Testing PostgreSQL query builder:".to_string(),
        build_user_query(&mut PostgresQueryBuilder::default())?,
    ])
}

pub fn run() {
    output::title("Pattern: Builder");

    output::section("Builder (Concept)");
    output::lines(concept_example());
    println!();

    output::section("Computer Assembly");
    output::lines(computer_example());
    println!();

    output::section("Meal Plan");
    output::lines(meal_plan_example());
    println!();

    output::section("SQL Query Builder");
    match sql_query_example() {
        Ok(lines) => output::lines(lines),
        Err(e) => output::error(e),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_director_products() {
        let lines = concept_example();
        assert_eq!(lines[1], "Product parts: PartA1");
        assert_eq!(lines[3], "Product parts: PartA1, PartB1, PartC1");
        assert_eq!(lines[5], "Product parts: PartA1, PartC1");
    }

    #[test]
    fn test_builder_resets_after_product() {
        let mut builder = ConcreteBuilder1::default();
        builder.produce_part_b();
        let _ = builder.product();
        assert_eq!(builder.product(), Product::default());
    }

    #[test]
    fn test_office_builder_forces_integrated_gpu() {
        let mut builder = OfficeComputerBuilder::default();
        let computer = builder.set_graphics_card("NVIDIA RTX 3090").computer();
        assert_eq!(computer.part("GraphicsCard"), Some("Integrated GPU"));
    }

    #[test]
    fn test_gaming_computer_parts_in_order() {
        let computer = ComputerDirector.build_gaming_computer(&mut GamingComputerBuilder::default());
        assert_eq!(
            computer.show_parts(),
            vec![
                "Computer Configuration:",
                "CPU: Intel i9",
                "RAM: 32GB",
                "Storage: 1TB SSD",
                "GraphicsCard: NVIDIA RTX 3090",
            ]
        );
    }

    #[test]
    fn test_vegetarian_meal() {
        let plan = MealPlanDirector.build_full_meal(&mut VegetarianMealPlanBuilder::default());
        assert_eq!(plan.main_course, "Vegetarian Burger");
        assert_eq!(plan.side_dish, "Salad");
        assert_eq!(plan.dessert, "Fruit Salad");
    }

    #[test]
    fn test_sql_dialects() {
        assert_eq!(
            build_user_query(&mut MySqlQueryBuilder::default()).unwrap(),
            "SELECT name, email, password FROM users WHERE age > '18' AND age < '30' LIMIT 10, 20;"
        );
        assert_eq!(
            build_user_query(&mut PostgresQueryBuilder::default()).unwrap(),
            "SELECT name, email, password FROM users WHERE age > '18' AND age < '30' LIMIT 10 OFFSET 20;"
        );
    }

    #[test]
    fn test_where_without_select_is_error() {
        let mut builder = MySqlQueryBuilder::default();
        let err = builder.where_clause("age", "18", ">").err().unwrap();
        assert!(matches!(err, PatternError::InvalidQuery(_)));
    }

    #[test]
    fn test_limit_without_select_is_error() {
        let mut builder = PostgresQueryBuilder::default();
        assert!(builder.limit(1, 2).is_err());
    }
}
