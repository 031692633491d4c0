use pretty_assertions::assert_eq;
use tests::{
    seed, setup,
    views::{names, CoreBuilding, OpsBuilder},
};
use vista::{
    options::{OrderByItem, Path, Predicate},
    stmt::Params,
    Db, QueryOptions,
};

async fn building_names(db: &Db, options: QueryOptions) -> Vec<String> {
    db.all::<CoreBuilding>("TBuilding", &options, Params::new())
        .await
        .unwrap()
        .into_iter()
        .map(|building| building.name)
        .collect()
}

#[tokio::test]
async fn skip_then_top_is_a_window_over_ordered_rows() {
    let test = setup().await;

    let ordered = building_names(
        &test.db,
        QueryOptions::new().order_by(OrderByItem::asc("Name")),
    )
    .await;
    assert_eq!(ordered, ["One L1", "One L2", "Two L1", "Two L2"]);

    for skip in 0..=4_i64 {
        for top in 0..=4_i64 {
            let page = building_names(
                &test.db,
                QueryOptions::new()
                    .order_by(OrderByItem::asc("Name"))
                    .skip(skip)
                    .top(top),
            )
            .await;

            let start = (skip as usize).min(ordered.len());
            let end = (start + top as usize).min(ordered.len());

            assert_eq!(page, &ordered[start..end], "skip={skip} top={top}");
        }
    }
}

#[tokio::test]
async fn top_zero_is_empty() {
    let test = setup().await;

    let page = building_names(&test.db, QueryOptions::new().top(0)).await;
    assert!(page.is_empty());
}

#[tokio::test]
async fn skip_past_the_end_is_empty() {
    let test = setup().await;

    let page = building_names(&test.db, QueryOptions::new().skip(10)).await;
    assert!(page.is_empty());
}

#[tokio::test]
async fn without_order_rows_come_in_source_order() {
    let test = setup().await;

    let rows = building_names(&test.db, QueryOptions::new()).await;
    assert_eq!(rows, ["One L1", "One L2", "Two L1", "Two L2"]);
}

#[tokio::test]
async fn first_clause_is_the_primary_key() {
    let test = setup().await;

    // Builder name descending, then building name descending
    let rows = building_names(
        &test.db,
        QueryOptions::new()
            .order_by(OrderByItem::desc("Builder/Name"))
            .order_by(OrderByItem::desc("Name")),
    )
    .await;

    assert_eq!(rows, ["One L2", "One L1", "Two L2", "Two L1"]);
}

#[tokio::test]
async fn ties_keep_source_order() {
    let test = setup().await;

    let rows = building_names(
        &test.db,
        QueryOptions::new().order_by(OrderByItem::asc("Builder/City/Name")),
    )
    .await;

    // Leeds: Two L2. London: One L1, One L2, Two L1 in source order.
    assert_eq!(rows, ["Two L2", "One L1", "One L2", "Two L1"]);
}

#[tokio::test]
async fn later_clauses_only_break_ties() {
    let test = setup().await;
    let second = uuid::Uuid::from_u128(0x0b11_0000_0000_0000_0000_0000_0000_0005);

    test.db
        .insert(
            "TBuilding",
            [seed::building(second, "Two L2", seed::SAM, seed::TENANT_TWO)],
        )
        .await
        .unwrap();

    let cases = [
        (
            QueryOptions::new().order_by(OrderByItem::desc("Name")),
            [seed::TWO_L2, second, seed::TWO_L1, seed::ONE_L2, seed::ONE_L1],
        ),
        (
            QueryOptions::new()
                .order_by(OrderByItem::desc("Name"))
                .order_by(OrderByItem::asc("Id")),
            [second, seed::TWO_L2, seed::TWO_L1, seed::ONE_L2, seed::ONE_L1],
        ),
        (
            QueryOptions::new()
                .order_by(OrderByItem::desc("Name"))
                .order_by(OrderByItem::desc("Id")),
            [seed::TWO_L2, second, seed::TWO_L1, seed::ONE_L2, seed::ONE_L1],
        ),
    ];

    for (options, expected) in cases {
        let ids: Vec<_> = test
            .db
            .all::<CoreBuilding>("TBuilding", &options, Params::new())
            .await
            .unwrap()
            .into_iter()
            .map(|building| building.id)
            .collect();

        assert_eq!(ids, expected, "{options:?}");
    }
}

#[tokio::test]
async fn paging_applies_after_filter() {
    let test = setup().await;

    let rows = building_names(
        &test.db,
        QueryOptions::new()
            .filter(Predicate::ne(Path::parse("Builder/Name"), "Sam"))
            .order_by(OrderByItem::asc("Name"))
            .skip(1)
            .top(5),
    )
    .await;

    assert_eq!(rows, ["Two L2"]);
}

#[tokio::test]
async fn nulls_sort_first_ascending() {
    let test = setup().await;

    // A builder whose city is missing from the source
    test.db
        .insert("TBuilder", [seed::builder(9, "Orphan", 99)])
        .await
        .unwrap();

    let options = QueryOptions::new()
        .order_by(OrderByItem::asc("City/Name"))
        .expand("City");

    let builders = test
        .db
        .all::<OpsBuilder>("TBuilder", &options, Params::new())
        .await
        .unwrap();

    assert_eq!(names(&builders), ["Orphan", "Mark", "Sam", "John"]);
    assert_eq!(builders[0].city, None);

    let options = QueryOptions::new().order_by(OrderByItem::desc("City/Name"));

    let builders = test
        .db
        .all::<OpsBuilder>("TBuilder", &options, Params::new())
        .await
        .unwrap();

    assert_eq!(names(&builders), ["Sam", "John", "Mark", "Orphan"]);
}

#[tokio::test]
async fn comparisons_with_missing_relation_are_false() {
    let test = setup().await;

    test.db
        .insert("TBuilder", [seed::builder(9, "Orphan", 99)])
        .await
        .unwrap();

    for filter in [
        Predicate::gt(Path::parse("City/Name"), "A"),
        Predicate::le(Path::parse("City/Name"), "ZZZ"),
    ] {
        let builders = test
            .db
            .all::<OpsBuilder>("TBuilder", &QueryOptions::new().filter(filter), Params::new())
            .await
            .unwrap();

        assert!(!names(&builders).contains(&"Orphan"));
    }

    let builders = test
        .db
        .all::<OpsBuilder>(
            "TBuilder",
            &QueryOptions::new().filter(Predicate::eq(
                Path::parse("City/Name"),
                vista::stmt::Value::Null,
            )),
            Params::new(),
        )
        .await
        .unwrap();

    assert_eq!(names(&builders), ["Orphan"]);
}
