//! Initial database migration.
//!
//! Creates the enums, tables, constraints and triggers for stores,
//! pavilions, billing inputs, payments, expenses and the monthly ledger.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: STORES & PAVILIONS
        // ============================================================
        db.execute_unprepared(STORES_SQL).await?;
        db.execute_unprepared(PAVILIONS_SQL).await?;

        // ============================================================
        // PART 3: BILLING INPUTS
        // ============================================================
        db.execute_unprepared(PAVILION_DISCOUNTS_SQL).await?;
        db.execute_unprepared(ADDITIONAL_CHARGES_SQL).await?;

        // ============================================================
        // PART 4: PAYMENTS
        // ============================================================
        db.execute_unprepared(PAYMENTS_SQL).await?;
        db.execute_unprepared(ADDITIONAL_CHARGE_PAYMENTS_SQL).await?;

        // ============================================================
        // PART 5: MONTHLY LEDGER
        // ============================================================
        db.execute_unprepared(PAVILION_MONTHLY_LEDGERS_SQL).await?;

        // ============================================================
        // PART 6: EXPENSES & STAFF
        // ============================================================
        db.execute_unprepared(PAVILION_EXPENSES_SQL).await?;
        db.execute_unprepared(HOUSEHOLD_EXPENSES_SQL).await?;
        db.execute_unprepared(STAFF_SQL).await?;

        // ============================================================
        // PART 7: TRIGGERS
        // ============================================================
        db.execute_unprepared(TRIGGERS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
CREATE TYPE pavilion_status AS ENUM ('AVAILABLE', 'RENTED', 'PREPAID');

CREATE TYPE paid_status AS ENUM ('UNPAID', 'PAID');

CREATE TYPE expense_category AS ENUM (
    'SALARIES',
    'PAYROLL_TAX',
    'PROFIT_TAX',
    'DIVIDENDS',
    'BANK_SERVICES',
    'VAT',
    'LAND_RENT',
    'OTHER',
    'UTILITIES',
    'HOUSEHOLD'
);
";

const STORES_SQL: &str = r"
CREATE TABLE stores (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    utilities_expense_status paid_status NOT NULL DEFAULT 'UNPAID',
    household_expense_status paid_status NOT NULL DEFAULT 'UNPAID',
    last_monthly_reset_period DATE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_reset_period_month_start CHECK (
        last_monthly_reset_period IS NULL
        OR last_monthly_reset_period = date_trunc('month', last_monthly_reset_period)::date
    )
);
";

const PAVILIONS_SQL: &str = r"
CREATE TABLE pavilions (
    id BIGSERIAL PRIMARY KEY,
    store_id BIGINT NOT NULL REFERENCES stores(id) ON DELETE CASCADE,
    name VARCHAR(100) NOT NULL,
    area NUMERIC(12, 2) NOT NULL,
    price_per_sqm NUMERIC(14, 2) NOT NULL,
    status pavilion_status NOT NULL DEFAULT 'AVAILABLE',
    tenant_name VARCHAR(255),
    utilities_amount NUMERIC(14, 2),
    advertising_amount NUMERIC(14, 2),
    prepaid_until DATE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_area_non_negative CHECK (area >= 0),
    CONSTRAINT chk_price_non_negative CHECK (price_per_sqm >= 0),
    CONSTRAINT chk_prepaid_until CHECK ((status = 'PREPAID') = (prepaid_until IS NOT NULL)),
    UNIQUE (store_id, name)
);

CREATE INDEX idx_pavilions_store ON pavilions(store_id, status);
";

const PAVILION_DISCOUNTS_SQL: &str = r"
CREATE TABLE pavilion_discounts (
    id BIGSERIAL PRIMARY KEY,
    pavilion_id BIGINT NOT NULL REFERENCES pavilions(id) ON DELETE CASCADE,
    amount NUMERIC(14, 2) NOT NULL,
    starts_at DATE NOT NULL,
    ends_at DATE,
    note TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_discount_amount CHECK (amount >= 0),
    CONSTRAINT chk_discount_window CHECK (ends_at IS NULL OR ends_at >= starts_at)
);

CREATE INDEX idx_pavilion_discounts_pavilion ON pavilion_discounts(pavilion_id);
";

const ADDITIONAL_CHARGES_SQL: &str = r"
CREATE TABLE additional_charges (
    id BIGSERIAL PRIMARY KEY,
    pavilion_id BIGINT NOT NULL REFERENCES pavilions(id) ON DELETE CASCADE,
    name VARCHAR(255) NOT NULL,
    amount NUMERIC(14, 2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_charge_amount CHECK (amount >= 0)
);

CREATE INDEX idx_additional_charges_pavilion ON additional_charges(pavilion_id, created_at);
";

const PAYMENTS_SQL: &str = r"
CREATE TABLE payments (
    id BIGSERIAL PRIMARY KEY,
    pavilion_id BIGINT NOT NULL REFERENCES pavilions(id) ON DELETE CASCADE,
    period DATE NOT NULL,
    rent_paid NUMERIC(14, 2),
    utilities_paid NUMERIC(14, 2),
    advertising_paid NUMERIC(14, 2),
    -- Legacy generic split, attributed to rent
    bank_transfer_paid NUMERIC(14, 2),
    cashbox1_paid NUMERIC(14, 2),
    cashbox2_paid NUMERIC(14, 2),
    rent_bank_transfer_paid NUMERIC(14, 2),
    rent_cashbox1_paid NUMERIC(14, 2),
    rent_cashbox2_paid NUMERIC(14, 2),
    utilities_bank_transfer_paid NUMERIC(14, 2),
    utilities_cashbox1_paid NUMERIC(14, 2),
    utilities_cashbox2_paid NUMERIC(14, 2),
    advertising_bank_transfer_paid NUMERIC(14, 2),
    advertising_cashbox1_paid NUMERIC(14, 2),
    advertising_cashbox2_paid NUMERIC(14, 2),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_payment_period_month_start CHECK (period = date_trunc('month', period)::date),
    UNIQUE (pavilion_id, period)
);
";

const ADDITIONAL_CHARGE_PAYMENTS_SQL: &str = r"
CREATE TABLE additional_charge_payments (
    id BIGSERIAL PRIMARY KEY,
    additional_charge_id BIGINT NOT NULL REFERENCES additional_charges(id) ON DELETE CASCADE,
    amount NUMERIC(14, 2) NOT NULL,
    bank_transfer_paid NUMERIC(14, 2),
    cashbox1_paid NUMERIC(14, 2),
    cashbox2_paid NUMERIC(14, 2),
    paid_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_charge_payment_amount CHECK (amount >= 0)
);

CREATE INDEX idx_charge_payments_charge ON additional_charge_payments(additional_charge_id, paid_at);
";

const PAVILION_MONTHLY_LEDGERS_SQL: &str = r"
CREATE TABLE pavilion_monthly_ledgers (
    id BIGSERIAL PRIMARY KEY,
    pavilion_id BIGINT NOT NULL REFERENCES pavilions(id) ON DELETE CASCADE,
    period DATE NOT NULL,
    expected_rent NUMERIC(14, 2) NOT NULL,
    expected_utilities NUMERIC(14, 2) NOT NULL,
    expected_additional NUMERIC(14, 2) NOT NULL,
    expected_total NUMERIC(14, 2) NOT NULL,
    actual_total NUMERIC(14, 2) NOT NULL,
    opening_debt NUMERIC(14, 2) NOT NULL,
    month_delta NUMERIC(14, 2) NOT NULL,
    closing_debt NUMERIC(14, 2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_ledger_period_month_start CHECK (period = date_trunc('month', period)::date),
    CONSTRAINT chk_ledger_delta CHECK (month_delta = expected_total - actual_total),
    CONSTRAINT chk_ledger_closing CHECK (closing_debt = opening_debt + month_delta),
    UNIQUE (pavilion_id, period)
);
";

const PAVILION_EXPENSES_SQL: &str = r"
CREATE TABLE pavilion_expenses (
    id BIGSERIAL PRIMARY KEY,
    store_id BIGINT NOT NULL REFERENCES stores(id) ON DELETE CASCADE,
    pavilion_id BIGINT REFERENCES pavilions(id) ON DELETE SET NULL,
    category expense_category NOT NULL,
    amount NUMERIC(14, 2) NOT NULL,
    status paid_status NOT NULL DEFAULT 'UNPAID',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_expense_amount CHECK (amount >= 0)
);

CREATE INDEX idx_pavilion_expenses_store ON pavilion_expenses(store_id, created_at);
";

const HOUSEHOLD_EXPENSES_SQL: &str = r"
CREATE TABLE household_expenses (
    id BIGSERIAL PRIMARY KEY,
    store_id BIGINT NOT NULL REFERENCES stores(id) ON DELETE CASCADE,
    name VARCHAR(255) NOT NULL,
    amount NUMERIC(14, 2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_household_amount CHECK (amount >= 0)
);

CREATE INDEX idx_household_expenses_store ON household_expenses(store_id, created_at);
";

const STAFF_SQL: &str = r"
CREATE TABLE staff (
    id BIGSERIAL PRIMARY KEY,
    store_id BIGINT NOT NULL REFERENCES stores(id) ON DELETE CASCADE,
    full_name VARCHAR(255) NOT NULL,
    position VARCHAR(255) NOT NULL,
    salary NUMERIC(14, 2) NOT NULL,
    salary_status paid_status NOT NULL DEFAULT 'UNPAID',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_salary CHECK (salary >= 0)
);

CREATE INDEX idx_staff_store ON staff(store_id);
";

const TRIGGERS_SQL: &str = r"
CREATE OR REPLACE FUNCTION update_updated_at_column()
RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = now();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_stores_updated_at
    BEFORE UPDATE ON stores
    FOR EACH ROW EXECUTE FUNCTION update_updated_at_column();

CREATE TRIGGER trg_pavilions_updated_at
    BEFORE UPDATE ON pavilions
    FOR EACH ROW EXECUTE FUNCTION update_updated_at_column();

CREATE TRIGGER trg_payments_updated_at
    BEFORE UPDATE ON payments
    FOR EACH ROW EXECUTE FUNCTION update_updated_at_column();

CREATE TRIGGER trg_ledgers_updated_at
    BEFORE UPDATE ON pavilion_monthly_ledgers
    FOR EACH ROW EXECUTE FUNCTION update_updated_at_column();
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS staff CASCADE;
DROP TABLE IF EXISTS household_expenses CASCADE;
DROP TABLE IF EXISTS pavilion_expenses CASCADE;
DROP TABLE IF EXISTS pavilion_monthly_ledgers CASCADE;
DROP TABLE IF EXISTS additional_charge_payments CASCADE;
DROP TABLE IF EXISTS payments CASCADE;
DROP TABLE IF EXISTS additional_charges CASCADE;
DROP TABLE IF EXISTS pavilion_discounts CASCADE;
DROP TABLE IF EXISTS pavilions CASCADE;
DROP TABLE IF EXISTS stores CASCADE;

DROP FUNCTION IF EXISTS update_updated_at_column() CASCADE;

DROP TYPE IF EXISTS expense_category;
DROP TYPE IF EXISTS paid_status;
DROP TYPE IF EXISTS pavilion_status;
";
